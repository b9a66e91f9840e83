use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}i{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{FG_GREEN}{BOLD}✔{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{FG_YELLOW}{BOLD}!{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{FG_RED}{BOLD}✘{RESET} {msg}");
}
