use crate::prelude::*;

use colored::Colorize;

/// One line per recipient plus a closing summary line.
pub fn validate(text: &str) -> Result<Vec<String>, CliError> {
    let recipients = parse_recipients(text)?;
    let mut lines = recipients
        .iter()
        .enumerate()
        .map(|(index, recipient)| {
            let status = if recipient.valid() {
                "valid".green()
            } else {
                "invalid address".red()
            };
            format!(
                "{:>4}  {}  {}  {status}",
                index + 1,
                recipient.address(),
                recipient.amount()
            )
        })
        .collect::<Vec<_>>();

    let summary = format!(
        "{} recipients, {} valid, {} invalid",
        recipients.len(),
        recipients.valid_count(),
        recipients.invalid_count()
    );
    lines.push(summary);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    #[test]
    fn lists_every_recipient_with_status() {
        colored::control::set_override(false);
        let lines = validate(&format!("{ALICE} 1,5\n\nnotanaddress 2")).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("   1  {ALICE}  1.5  valid"));
        assert_eq!(lines[1], "   2  notanaddress  2  invalid address");
        assert_eq!(lines[2], "2 recipients, 1 valid, 1 invalid");
    }

    #[test]
    fn amount_errors_fail_validation() {
        let error = validate(&format!("{ALICE} abc")).unwrap_err();
        assert!(error.to_string().contains("Line 1 has an invalid amount"));
    }
}
