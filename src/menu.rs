//! Interactive menu loop
//!
//! Thin shell over [`TaskStore`]: prints the numbered menu, prompts for
//! input, and renders results. Store errors are reported and the menu
//! resumes; only prompt I/O failures abort the loop.

use std::io::{self, Write};

use anyhow::Result;

use crate::task::{StoreError, Task, TaskStore};

const TABLE_COL_ID: usize = 4;
const TABLE_COL_TITLE: usize = 40;

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Add,
    Delete,
    MarkDone,
    View,
    Exit,
}

impl Choice {
    /// Parse a menu selection. Anything other than 1-5 is invalid.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Delete),
            "3" => Some(Self::MarkDone),
            "4" => Some(Self::View),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Parse a task id typed at a prompt.
pub fn parse_id(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Truncate to `max` characters. Counts chars, not bytes: titles are
/// arbitrary user text, and a byte slice could split a multibyte char.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

fn print_menu() {
    println!();
    println!("1. Add Task");
    println!("2. Delete Task");
    println!("3. Mark Done");
    println!("4. View Tasks");
    println!("5. Exit");
}

/// Prompt for one line of input. `None` means stdin closed.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_table_header() {
    println!(
        "{:<width_id$} {:<width_title$} STATUS",
        "ID",
        "TITLE",
        width_id = TABLE_COL_ID,
        width_title = TABLE_COL_TITLE
    );
    println!("{}", "-".repeat(TABLE_COL_ID + TABLE_COL_TITLE + 8));
}

fn print_table_row(task: &Task) {
    let title = truncate(&task.title, TABLE_COL_TITLE);
    println!(
        "{:<width_id$} {:<width_title$} {}",
        task.id,
        title,
        task.status,
        width_id = TABLE_COL_ID,
        width_title = TABLE_COL_TITLE
    );
}

fn report_store_error(err: &StoreError, store: &TaskStore) {
    eprintln!("Error: {}", err);
    if store.is_dirty() {
        eprintln!(
            "Warning: changes are held in memory but not yet saved to {}",
            store.path().display()
        );
    }
}

fn add_task(store: &mut TaskStore) -> Result<()> {
    let Some(title) = prompt("Enter task title: ")? else {
        return Ok(());
    };
    match store.add(&title) {
        Ok(task) => println!("Task added: {}", task.title),
        Err(err) => report_store_error(&err, store),
    }
    Ok(())
}

fn delete_task(store: &mut TaskStore) -> Result<()> {
    let Some(input) = prompt("Enter task ID: ")? else {
        return Ok(());
    };
    let Some(id) = parse_id(&input) else {
        println!("Invalid task ID: {}", input);
        return Ok(());
    };
    // Confirmation prints whether or not the id existed; a missing id is
    // a no-op, not an error.
    match store.delete(id) {
        Ok(_) => println!("Task {} deleted", id),
        Err(err) => report_store_error(&err, store),
    }
    Ok(())
}

fn mark_done(store: &mut TaskStore) -> Result<()> {
    let Some(input) = prompt("Enter task ID: ")? else {
        return Ok(());
    };
    let Some(id) = parse_id(&input) else {
        println!("Invalid task ID: {}", input);
        return Ok(());
    };
    if let Err(err) = store.mark_done(id) {
        report_store_error(&err, store);
    }
    Ok(())
}

fn view_tasks(store: &TaskStore) {
    match store.list() {
        None => println!("No tasks."),
        Some(tasks) => {
            print_table_header();
            for task in tasks {
                print_table_row(task);
            }
        }
    }
}

/// Run the menu loop until the user exits or stdin closes.
pub fn run(store: &mut TaskStore) -> Result<()> {
    loop {
        print_menu();
        let Some(input) = prompt("Enter choice: ")? else {
            break;
        };
        match Choice::parse(&input) {
            Some(Choice::Add) => add_task(store)?,
            Some(Choice::Delete) => delete_task(store)?,
            Some(Choice::MarkDone) => mark_done(store)?,
            Some(Choice::View) => view_tasks(store),
            Some(Choice::Exit) => {
                println!("Exiting...");
                break;
            }
            None => println!("Invalid choice"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parse_valid() {
        assert_eq!(Choice::parse("1"), Some(Choice::Add));
        assert_eq!(Choice::parse("2"), Some(Choice::Delete));
        assert_eq!(Choice::parse("3"), Some(Choice::MarkDone));
        assert_eq!(Choice::parse("4"), Some(Choice::View));
        assert_eq!(Choice::parse("5"), Some(Choice::Exit));
    }

    #[test]
    fn test_choice_parse_trims_whitespace() {
        assert_eq!(Choice::parse(" 4 \n"), Some(Choice::View));
    }

    #[test]
    fn test_choice_parse_invalid() {
        assert_eq!(Choice::parse("0"), None);
        assert_eq!(Choice::parse("6"), None);
        assert_eq!(Choice::parse("add"), None);
        assert_eq!(Choice::parse(""), None);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7"), Some(7));
        assert_eq!(parse_id(" 12 "), Some(12));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_with_small_max() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 1), "h");
    }

    #[test]
    fn test_truncate_multibyte_within_limit() {
        // 14 chars but 42 bytes; must come back whole, not panic on a
        // byte-offset slice.
        let title = "あ".repeat(14);
        assert_eq!(truncate(&title, 40), title);
    }

    #[test]
    fn test_truncate_multibyte_over_limit() {
        let title = "あ".repeat(44);
        let cut = truncate(&title, 40);
        assert_eq!(cut.chars().count(), 40);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with('あ'));
    }
}
