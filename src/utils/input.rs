use std::io::{self, Write};

use crate::utils::error::Result;

pub fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn prompt_password(label: &str) -> Result<String> {
    Ok(rpassword::prompt_password(label)?.trim().to_string())
}
