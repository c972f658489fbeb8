//! Handler for the `idc-id` subcommand.

use kiro_token_name::extract_idc_identifier;

use crate::cli::IdcIdArgs;

/// Execute the `idc-id` subcommand with the given arguments.
///
/// Returns `false` when the URL has no `<identifier>.awsapps.com` host.
pub fn execute(args: &IdcIdArgs) -> bool {
    let identifier = extract_idc_identifier(&args.start_url);
    if identifier.is_empty() {
        log::warn!("no '<identifier>.awsapps.com' host in start URL");
        return false;
    }

    println!("{identifier}");
    true
}
