use super::unlock;
use crate::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Key { reveal } = cmd {
        let credentials = unlock(ctx)?;
        let key = if *reveal {
            credentials.api_key.clone()
        } else {
            credentials.masked_api_key()
        };
        println!("APIKey     : {key}");
        println!("EmployeeID : {}", credentials.employee_id);
    }
    Ok(())
}
