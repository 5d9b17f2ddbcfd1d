use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
     _       _                       _
  __| | ___ | |_ __ _ _   _  __ _  __| |
 / _` |/ _ \| __/ _` | | | |/ _` |/ _` |
| (_| | (_) | || (_| | |_| | (_| | (_| |
 \__,_|\___/ \__\__, |\__,_|\__,_|\__,_|
                   |_|
"#;

/// Columns taken by the widest banner line.
pub const WIDTH: usize = 40;

pub fn print() {
    for line in BANNER.lines().skip(1) {
        print::print(&format!("{}", line.bright_green().bold()));
    }
}
