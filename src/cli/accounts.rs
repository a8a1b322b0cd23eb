use super::commands::AccountsArgs;
use crate::errors::FindashError;
use crate::reporting::tables;

pub async fn handle_accounts(args: AccountsArgs) -> Result<(), FindashError> {
    let (_settings, client) = super::connect(args.config.as_deref()).await?;
    let accounts = client.fetch_accounts().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&accounts)?);
    } else if accounts.is_empty() {
        println!("No managed accounts found.");
    } else {
        println!("{}", tables::accounts_table(&accounts));
        println!("{} accounts", accounts.len());
    }

    Ok(())
}
