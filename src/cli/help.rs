//! Help message display for CLI.

#![allow(clippy::print_stdout)]

/// Print help message based on configuration state.
pub fn print_smart_help(configured: bool) {
    if configured {
        print_configured_help();
    } else {
        print_first_time_help();
    }
}

/// Print detailed setup guide for first-time users.
pub fn print_first_time_help() {
    println!("No manifests given. Get started with capfetch:");
    println!();
    println!("1. Install yt-dlp (https://github.com/yt-dlp/yt-dlp) and verify it:");
    println!("   capfetch check");
    println!();
    println!("2. Optionally create a configuration file to change defaults:");
    println!("   capfetch config init");
    println!();
    println!("3. Fetch clips from a manifest:");
    println!("   capfetch train.csv");
    println!();
    println!("Manifests are CSV files with identifier, start_time, end_time, and an");
    println!("optional caption column. Clips land in ./clips by default, together with");
    println!("a status CSV recording each row's outcome.");
    println!();
    println!("Run 'capfetch -h' for all options.");
}

/// Print brief usage reminder for configured users.
pub fn print_configured_help() {
    println!("Usage: capfetch [MANIFESTS]... [OPTIONS]");
    println!();
    println!("Example: capfetch train.csv -o audio -j 8");
    println!();
    println!("Run 'capfetch -h' for all options or 'capfetch config show' to see settings.");
}
