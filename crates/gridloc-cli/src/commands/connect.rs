use color_eyre::eyre::Result;
use gridloc_services::{probe_endpoints, test_connection};

pub fn run_test_connection(use_color: bool) -> Result<()> {
    let (client, _cfg) = super::client_from_config()?;
    match test_connection(&client) {
        Ok(n) => {
            crate::ui::ok(use_color, &format!("connected, {n} branch(es) visible"));
            Ok(())
        }
        Err(e) => {
            crate::ui::fail(use_color, &format!("connection failed: {e}"));
            std::process::exit(1);
        }
    }
}

pub fn run_test_endpoints(use_color: bool) -> Result<()> {
    let (client, _cfg) = super::client_from_config()?;
    let probes = probe_endpoints(&client);
    let mut failed = 0usize;
    for p in &probes {
        if p.ok {
            crate::ui::ok(use_color, &format!("{}: {}", p.name, p.detail));
        } else {
            failed += 1;
            crate::ui::fail(use_color, &format!("{}: {}", p.name, p.detail));
        }
    }
    println!("{} endpoint(s) probed, {} failed", probes.len(), failed);
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
