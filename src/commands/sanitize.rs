//! Handler for the `sanitize` subcommand.

use kiro_token_name::sanitize_email_for_filename;

use crate::cli::SanitizeArgs;

/// Execute the `sanitize` subcommand with the given arguments.
pub fn execute(args: &SanitizeArgs) {
    println!("{}", sanitize_email_for_filename(&args.input));
}
