//! `roster init` - write a starter configuration file.

use std::fs;
use std::path::Path;

const STARTER_CONFIG: &str = r#"# roster configuration

# Where the employee directory lives (MySQL).
connection:
  host: localhost
  port: 8889
  database: employees
  username: root
  password: ""
  # Uncomment to read the store password from the environment instead.
  # password_env: ROSTER_DB_PASSWORD
  connect_timeout_seconds: 5

# The operator login is read from these environment variables at startup.
operator:
  username_env: ROSTER_OPERATOR_USERNAME
  password_env: ROSTER_OPERATOR_PASSWORD
"#;

pub fn run(output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            output.display()
        );
    }

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, STARTER_CONFIG)?;

    println!("✔ Wrote {}", output.display());
    println!();
    println!("Set the operator login before running `roster list`:");
    println!("  export ROSTER_OPERATOR_USERNAME=...");
    println!("  export ROSTER_OPERATOR_PASSWORD=...");
    Ok(())
}
