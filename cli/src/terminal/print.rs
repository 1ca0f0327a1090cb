use std::fmt::Display;
use std::io::{self, Write};

use colored::*;

use crate::terminal::colors;
use ouilookup_common::vendors::Vendor;

pub const TOTAL_WIDTH: usize = 64;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn println<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{msg}")
}

pub fn header<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println(out, &format!("{}", line))
}

/// Prints `key....: value`, padding every key to `key_width`.
pub fn aligned_line<W, V>(out: &mut W, key: &str, value: V, key_width: usize) -> io::Result<()>
where
    W: Write + ?Sized,
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(out, format!("{}{} {}", key.color(colors::PRIMARY), colon, value))
}

pub fn print_status<W: Write + ?Sized, T: AsRef<str>>(out: &mut W, msg: T) -> io::Result<()> {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    println(out, &message)
}

/// A problem the user should know about that did not stop the program.
pub fn diagnostic<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    println(out, &format!("{} {}", "[-]".red().bold(), msg))
}

pub fn vendor(vendor: &Vendor) -> ColoredString {
    match vendor {
        Vendor::Resolved(name) => name.as_str().color(colors::VENDOR),
        Vendor::Unavailable(_) => vendor.to_string().color(colors::NOT_FOUND),
    }
}

pub fn mac(mac: &str) -> ColoredString {
    mac.color(colors::MAC_ADDR)
}
