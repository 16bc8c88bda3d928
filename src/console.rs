//! Pretty terminal output with colors.

use std::net::SocketAddr;

use colored::Colorize;

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════════════════════╗".cyan());
    println!("{}", "║                                                           ║".cyan());
    println!("║     {}     ║", format!("📈 AgentPulse v{:<43}", env!("CARGO_PKG_VERSION")).bold().white());
    println!("║     {}     ║", "Beta program metrics for the agent fleet       ".dimmed());
    println!("{}", "║                                                           ║".cyan());
    println!("{}", "╚═══════════════════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: SocketAddr) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {} {}", "ANY ".yellow(), "/api/metrics".white(), "Metrics snapshot".dimmed());
    println!("  {} {}     {}", "ANY ".yellow(), "/metrics".white(), "Metrics snapshot (alias)".dimmed());
    println!("  {} {}      {}", "GET ".green(), "/health".white(), "Liveness probe".dimmed());
    println!();
}
