// src/ui.rs

use crate::{constants, symbols};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

pub fn print_header(title: &str) {
    println!("\n{}", "═".repeat(constants::UI_WIDTH));
    println!(" {}", title.cyan().bold());
    println!("{}", "═".repeat(constants::UI_WIDTH));
}

pub fn print_sub_header(title: &str) {
    println!("\n--- {} ---", title.bold());
}

pub fn box_message(title: &str, content: &[&str], color_func: fn(ColoredString) -> ColoredString) {
    println!("\n┌{}┐", "─".repeat(constants::UI_WIDTH - 2));
    println!("  {}", color_func(title.bold()));
    println!("├{}┤", "─".repeat(constants::UI_WIDTH - 2));
    for line in content {
        println!("  {}", line);
    }
    println!("└{}┘", "─".repeat(constants::UI_WIDTH - 2));
}

pub fn plain(message: &str) {
    println!("{}", message);
}

pub fn info(message: &str) {
    println!("{} {}", *symbols::INFO, message);
}

pub fn success(message: &str) {
    println!("{} {}", *symbols::OK, message.green());
}

pub fn warn(message: &str) {
    eprintln!("{} {}", *symbols::WARN, message.yellow());
}

pub fn error(message: &str) {
    eprintln!("{} {}", *symbols::ERROR, message.red());
}

/// 一行読み取る。入力が閉じられた (EOF) 場合は空行と同じく空文字列を返す
pub fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<String> {
    print!("\n>>> {}: ", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
    }
    Ok(line.trim().to_string())
}

/// 検索の待機中に表示するスピナー。メッセージは送信開始後に呼び出し側が設定する
pub fn new_spinner() -> ProgressBar {
    let pbar = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pbar.set_style(style);
    pbar.enable_steady_tick(Duration::from_millis(100));
    pbar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_and_treats_eof_as_empty() {
        let mut input = Cursor::new("  set query 統計  \n");
        assert_eq!(prompt(&mut input, "コマンド").unwrap(), "set query 統計");
        assert_eq!(prompt(&mut input, "コマンド").unwrap(), "");
    }
}
