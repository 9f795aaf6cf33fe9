use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::domain::{format_cents, parse_cents, Ledger, KIND_EXPENSES, KIND_INCOME};
use crate::io::Exporter;

/// Libretto - Personal Budget Tracker
#[derive(Parser)]
#[command(name = "libretto")]
#[command(about = "A session-based income and expense tracker")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let mut shell = Shell::new(stdin.lock(), io::stdout()).with_verbose(self.verbose);
        shell.run()
    }
}

/// Interactive menu shell driving one in-memory ledger session.
///
/// Input and output are generic so tests can script a whole session. Errors
/// returned by the exporter are reported and the loop keeps running; only
/// failures on the output stream itself abort the session.
pub struct Shell<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
    verbose: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            ledger: Ledger::new(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run the menu loop until the user exits or input reaches EOF.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_entry()?,
                "2" => self.list_entries()?,
                "3" => self.show_total("Total income", KIND_INCOME)?,
                "4" => self.show_total("Total expenses", KIND_EXPENSES)?,
                "5" => self.save_entries()?,
                "6" => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Personal Budget Tracker ---")?;
        writeln!(self.output, "1. Add entry")?;
        writeln!(self.output, "2. List entries")?;
        writeln!(self.output, "3. Show total income")?;
        writeln!(self.output, "4. Show total expenses")?;
        writeln!(self.output, "5. Save entries to CSV")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line, trimmed. Returns None on EOF.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn add_entry(&mut self) -> Result<()> {
        let Some(amount_input) = self.prompt("Enter amount: ")? else {
            return Ok(());
        };
        let amount_cents = match parse_cents(&amount_input) {
            Ok(cents) => cents,
            Err(_) => {
                writeln!(
                    self.output,
                    "Invalid amount '{amount_input}'. Use a decimal like 42.50"
                )?;
                return Ok(());
            }
        };

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(());
        };
        let Some(kind) = self.prompt("Enter type (income/expenses): ")? else {
            return Ok(());
        };

        let entry = self.ledger.append(amount_cents, category, kind);
        if self.verbose {
            eprintln!(
                "[Session] Recorded entry {}: {} {} ({})",
                entry.id,
                format_cents(entry.amount_cents),
                entry.category,
                entry.kind
            );
        }
        writeln!(self.output, "Entry added successfully")?;
        Ok(())
    }

    fn list_entries(&mut self) -> Result<()> {
        writeln!(self.output, "ID\tAmount\tCategory\tDate\tType")?;
        for entry in self.ledger.entries() {
            writeln!(
                self.output,
                "{}\t{}\t{}\t{}\t{}",
                entry.id,
                format_cents(entry.amount_cents),
                entry.category,
                entry.recorded_at.format("%Y-%m-%d"),
                entry.kind
            )?;
        }
        Ok(())
    }

    fn show_total(&mut self, label: &str, kind: &str) -> Result<()> {
        let total = self.ledger.total(kind);
        writeln!(self.output, "{}: {}", label, format_cents(total))?;
        Ok(())
    }

    fn save_entries(&mut self) -> Result<()> {
        let Some(filename) = self.prompt("Enter filename (e.g. entries.csv): ")? else {
            return Ok(());
        };

        // Export errors are reported, not fatal; the session keeps running
        match Exporter::new(&self.ledger).export_csv_file(&filename) {
            Ok(count) => {
                if self.verbose {
                    eprintln!("[Session] Exported {count} entries to {filename}");
                }
                writeln!(self.output, "Entries saved to {filename}")?;
            }
            Err(err) => writeln!(self.output, "Error saving entries: {err}")?,
        }
        Ok(())
    }
}
