use crate::prelude::*;
use std::process::ExitCode;

fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let parameters = PlanParameters::try_from(args)?;
    let text = read_recipients_text(parameters.recipients())?;
    let output = plan(&text, &parameters)?;
    info!(
        "Planned {} to {} recipients on chain {}",
        output.function, output.recipients, output.chain_id
    );
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let text = read_recipients_text(&args.recipients)?;
    for line in validate(&text)? {
        println!("{line}");
    }
    Ok(())
}

fn run_subcommand(command: Command) -> Result<(), CliError> {
    match command {
        Command::Plan(plan_args) => run_plan(plan_args),
        Command::Validate(validate_args) => run_validate(validate_args),
    }
}

pub fn run(cli_args: CliArgs) -> ExitCode {
    match run_subcommand(cli_args.command) {
        Ok(_) => {
            debug!("{} ran successfully", BINARY_NAME);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error running {}: {}", BINARY_NAME, e);
            ExitCode::FAILURE
        }
    }
}
