//! `roster list` - log in, then show the employee directory.

use anyhow::Context;
use roster_adapter_mysql::{EmployeeDirectory, MySqlEmployeeDirectory};
use roster_core::{Credentials, EmployeeRecord, LoginOutcome, RosterConfig};
use roster_gate::{Authenticator, CredentialPrompt, GateError, LoginGate, StaticAuthenticator};
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// How a session ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Listed(usize),
    Aborted,
}

/// Line-based credential prompt. End of input cancels the login.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> CredentialPrompt for TerminalPrompt<R, W> {
    fn prompt(&mut self, failed_attempts: u32) -> Result<Option<Credentials>, GateError> {
        let io_err = |e: io::Error| GateError::Prompt(e.to_string());

        if failed_attempts > 0 {
            writeln!(self.output, "Invalid credentials, try again (Ctrl-D to cancel).")
                .map_err(io_err)?;
        }

        let Some(username) = self.ask("Username").map_err(io_err)? else {
            return Ok(None);
        };
        let Some(password) = self.ask("Password").map_err(io_err)? else {
            return Ok(None);
        };
        Ok(Some(Credentials { username, password }))
    }
}

pub async fn run(config_path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let config = RosterConfig::from_file(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    let expected = config
        .operator
        .credentials()
        .context("operator credentials are not available")?;

    let gate = LoginGate::new(StaticAuthenticator::new(expected));
    let directory = MySqlEmployeeDirectory::new(config.connection);
    let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stderr());
    let mut out = io::stdout().lock();

    if run_session(gate, &mut prompt, &directory, &mut out, format).await? == SessionEnd::Aborted {
        eprintln!("Login cancelled.");
    }
    Ok(())
}

/// Drive the gate, then fetch and render the directory once.
pub async fn run_session<A, P, W>(
    mut gate: LoginGate<A>,
    prompt: &mut P,
    directory: &dyn EmployeeDirectory,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<SessionEnd>
where
    A: Authenticator,
    P: CredentialPrompt + ?Sized,
    W: Write,
{
    match gate.run(prompt).await? {
        LoginOutcome::Aborted => return Ok(SessionEnd::Aborted),
        LoginOutcome::Failure => anyhow::bail!("login did not complete"),
        LoginOutcome::Success => {}
    }

    let employees = directory
        .fetch_employees()
        .await
        .context("could not load the employee directory")?;

    match format {
        OutputFormat::Table => render_table(&employees, out)?,
        OutputFormat::Json => render_json(&employees, out)?,
    }
    Ok(SessionEnd::Listed(employees.len()))
}

const HEADERS: [&str; 3] = ["Emp No", "First Name", "Last Name"];

pub fn render_table<W: Write>(employees: &[EmployeeRecord], out: &mut W) -> io::Result<()> {
    if employees.is_empty() {
        return writeln!(out, "No employees found.");
    }

    let rows: Vec<[String; 3]> = employees
        .iter()
        .map(|e| {
            [
                e.employee_number.to_string(),
                e.first_name.clone(),
                e.last_name.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_string);
    let rule = widths.map(|w| "-".repeat(w));
    write_row(out, &header, &widths)?;
    write_row(out, &rule, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 3], widths: &[usize; 3]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

pub fn render_json<W: Write>(employees: &[EmployeeRecord], out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, employees)?;
    writeln!(out)?;
    Ok(())
}
