use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Duration, OffsetDateTime};

use expense_tracker::{ExpenseData, ExpenseStore, SQLiteExpenseStore, initialize_db};

/// A utility for creating a test database for the expense_tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let store = SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)));
    let today = OffsetDateTime::now_utc().date();
    let this_month = today.replace_day(1)?;
    let last_month = this_month - Duration::days(1);

    println!("Creating test expenses...");

    for (description, amount, date) in sample_expenses(this_month, last_month) {
        store.create(ExpenseData {
            description: description.to_owned(),
            amount,
            date,
        })?;
    }

    println!("Success!");

    Ok(())
}

/// Expenses spread over the first day of this month and the last day of last month.
fn sample_expenses(this_month: Date, last_month: Date) -> [(&'static str, f64, Date); 6] {
    [
        ("Rent", 450.0, last_month),
        ("Groceries", 123.45, last_month),
        ("Power bill", 98.7, last_month),
        ("Rent", 450.0, this_month),
        ("Coffee", 4.5, this_month),
        ("Bus fare", 2.8, this_month),
    ]
}
