use crate::prelude::*;

fn is_separator(c: char) -> bool {
    c == ' ' || c == ',' || c == '\t'
}

/// Splits a trimmed, non-blank line into its fields.
///
/// Fields are separated by runs of spaces, commas or tabs. When whitespace
/// alone already separates the line into an address and an amount with at
/// most one comma, that comma is its decimal separator (`0xabc… 2,25`).
fn tokenize(line: &str) -> Vec<&str> {
    let fields = line
        .split_whitespace()
        .map(|field| field.trim_matches(','))
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>();
    if let [address, amount] = fields.as_slice() {
        if !address.contains(',') && amount.matches(',').count() <= 1 {
            return fields;
        }
    }
    line.split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<Recipient, ParseRecipientsError> {
    let tokens = tokenize(text);
    let [address, amount] = tokens.as_slice() else {
        return Err(ParseRecipientsError::InvalidFormat { line });
    };

    let amount = normalize_amount(amount);
    if !is_positive_amount(&amount) {
        return Err(ParseRecipientsError::InvalidAmount { line, amount });
    }

    let recipient = Recipient::new(*address, amount);
    if !recipient.valid() {
        trace!("Line {line}: invalid address {address}");
    }
    Ok(recipient)
}

/// Parses free form `address amount` lines into a [`RecipientList`].
///
/// Blank lines are skipped and not counted. A line with anything but two
/// fields, or with an amount that is not a positive decimal, aborts the whole
/// parse. A malformed address does not: the recipient is kept and marked
/// invalid.
pub fn parse_recipients(text: &str) -> Result<RecipientList, ParseRecipientsError> {
    let recipients = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect::<Result<RecipientList, _>>()?;

    debug!(
        "Parsed {} recipients ({} with invalid address)",
        recipients.len(),
        recipients.invalid_count()
    );
    Ok(recipients)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
    const BOB: &str = "0x742D35cC6634c0532925a3B844BC9E7595F0beBB";

    #[test]
    fn parses_lines_and_normalizes_decimal_comma() {
        let recipients = parse_recipients(&format!("{ALICE} 1.5\n{BOB} 2,25")).unwrap();
        assert_eq!(
            *recipients,
            vec![Recipient::new(ALICE, "1.5"), Recipient::new(BOB, "2.25")]
        );
        assert!(recipients.iter().all(|r| r.valid()));
    }

    #[test]
    fn accepts_every_separator() {
        for text in [
            format!("{ALICE} 1"),
            format!("{ALICE},1"),
            format!("{ALICE}\t1"),
            format!("{ALICE}, 1"),
            format!("{ALICE} ,\t 1"),
            format!("  {ALICE}   1  "),
        ] {
            let recipients = parse_recipients(&text).unwrap();
            assert_eq!(*recipients, vec![Recipient::new(ALICE, "1")], "{text:?}");
        }
    }

    #[test]
    fn blank_lines_are_ignored_and_not_counted() {
        let text = format!("\n   \n{ALICE} 1\n\t\n{BOB} 1 extra\n");
        assert_eq!(
            parse_recipients(&text),
            Err(ParseRecipientsError::InvalidFormat { line: 2 })
        );
    }

    #[test]
    fn wrong_field_count_is_a_format_error() {
        assert_eq!(
            parse_recipients(&format!("{ALICE} 1.5 extra")),
            Err(ParseRecipientsError::InvalidFormat { line: 1 })
        );
        assert_eq!(
            parse_recipients(ALICE),
            Err(ParseRecipientsError::InvalidFormat { line: 1 })
        );
        assert_eq!(
            parse_recipients(&format!("{ALICE},1,5")),
            Err(ParseRecipientsError::InvalidFormat { line: 1 })
        );
        assert_eq!(
            parse_recipients(&format!("{ALICE} 1,5,0")),
            Err(ParseRecipientsError::InvalidFormat { line: 1 })
        );
    }

    #[test]
    fn bad_amounts_are_fatal() {
        for amount in ["-1", "abc", "0", "0.0", "1e3"] {
            let error = parse_recipients(&format!("{BOB} 2\n{ALICE} {amount}")).unwrap_err();
            assert_eq!(
                error,
                ParseRecipientsError::InvalidAmount {
                    line: 2,
                    amount: amount.to_owned()
                }
            );
            assert_eq!(error.line(), 2);
        }
    }

    #[test]
    fn invalid_address_is_kept_but_marked() {
        let recipients = parse_recipients("notanaddress 1.0").unwrap();
        assert_eq!(recipients.len(), 1);
        assert!(!recipients[0].valid());
        assert_eq!(recipients.valid_count(), 0);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let recipients = parse_recipients(&format!("{ALICE} 1\n{BOB} 2\n{ALICE} 3")).unwrap();
        let amounts = recipients
            .iter()
            .map(|r| r.amount().as_str())
            .collect::<Vec<_>>();
        assert_eq!(amounts, vec!["1", "2", "3"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(parse_recipients("").unwrap().is_empty());
        assert!(parse_recipients(" \n\t\n  ").unwrap().is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = format!("{ALICE} 1,5\nnotanaddress 2\n{BOB} 0.1");
        assert_eq!(parse_recipients(&text), parse_recipients(&text));
    }

    #[test]
    fn error_messages_name_the_line() {
        assert_eq!(
            ParseRecipientsError::InvalidFormat { line: 3 }.to_string(),
            "Line 3 has an invalid format. Expected: \"address amount\""
        );
    }
}
