use crate::errors::AppResult;

pub fn handle() -> AppResult<()> {
    println!("rtimesheet {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
