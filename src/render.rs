//! Snapshot renderer
//!
//! Pure formatting: the assembled snapshot goes out as a fixed
//! ASCII-art block with a 24-bit color palette. The only I/O here is
//! writing to the stream the caller hands in; `main` is responsible
//! for flushing it before exit.

use std::io::{self, Write};

use colored::Colorize;

use crate::facts::Snapshot;

// Palette (24-bit): title green, label blue, separator gray, logo orange.
const TITLE: (u8, u8, u8) = (158, 206, 106);
const LABEL: (u8, u8, u8) = (122, 162, 247);
const GRAY: (u8, u8, u8) = (86, 95, 137);
const ORANGE: (u8, u8, u8) = (255, 158, 100);

const LOGO: &[&str] = &[
    r"         .--.        ",
    r"        |o_o |       ",
    r"        |:_/ |       ",
    r"       //   \ \      ",
    r"      (|     | )     ",
    r"     /'\_   _/`\     ",
    r"     \___)=(___/     ",
];

const LOGO_WIDTH: usize = 21;

/// Write the rendered block for `snapshot` to `out`.
pub fn render<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    let info = info_lines(snapshot);
    let rows = LOGO.len().max(info.len());

    for row in 0..rows {
        let art = LOGO.get(row).copied().unwrap_or("");
        let line = info.get(row).map(String::as_str).unwrap_or("");
        writeln!(
            out,
            "{}  {}",
            format!("{:<width$}", art, width = LOGO_WIDTH).truecolor(ORANGE.0, ORANGE.1, ORANGE.2),
            line
        )?;
    }

    Ok(())
}

fn info_lines(snapshot: &Snapshot) -> Vec<String> {
    let header = snapshot.host.header();
    let separator = "-".repeat(header.chars().count());

    let mut lines = vec![
        header
            .truecolor(TITLE.0, TITLE.1, TITLE.2)
            .bold()
            .to_string(),
        separator.truecolor(GRAY.0, GRAY.1, GRAY.2).to_string(),
        field("OS", &snapshot.os.name),
        field("Kernel", &snapshot.host.kernel),
        field("Uptime", &format_uptime(snapshot.uptime_seconds)),
        field(
            "CPU",
            &format!("{} ({} cores)", snapshot.cpu.model, snapshot.cpu.cores),
        ),
    ];

    if let Some(ref gpu) = snapshot.gpu {
        lines.push(field("GPU", gpu));
    }

    lines.push(field(
        "Memory",
        &format!(
            "{} MB free of {} MB",
            snapshot.memory.available_mb, snapshot.memory.total_mb
        ),
    ));
    lines.push(field(
        "Disk",
        &format!(
            "{:.1} GB free of {:.1} GB",
            snapshot.disk.available_gb, snapshot.disk.total_gb
        ),
    ));

    lines
}

fn field(label: &str, value: &str) -> String {
    format!(
        "{} {}",
        format!("{}:", label)
            .truecolor(LABEL.0, LABEL.1, LABEL.2)
            .bold(),
        value
    )
}

/// Human-readable uptime: `45s`, `2m 5s`, `1h 2m 5s`.
pub fn format_uptime(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else {
        format!(
            "{}h {}m {}s",
            seconds / 3600,
            seconds % 3600 / 60,
            seconds % 60
        )
    }
}
