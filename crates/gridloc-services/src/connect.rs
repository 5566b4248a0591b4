use gridloc_tms::{TmsApi, TmsError};

/// One read endpoint poked by `test-endpoints`.
#[derive(Debug, Clone)]
pub struct EndpointProbe {
    pub name: &'static str,
    pub ok: bool,
    pub detail: String,
}

/// Cheapest authenticated call: list branches. Returns how many the
/// project has so the caller can print something concrete.
pub fn test_connection(api: &dyn TmsApi) -> Result<usize, TmsError> {
    Ok(api.list_branches()?.len())
}

/// Probe each read endpoint in turn; failures are reported per endpoint,
/// not raised.
pub fn probe_endpoints(api: &dyn TmsApi) -> Vec<EndpointProbe> {
    let mut probes = Vec::new();

    let branch_id = match api.list_branches() {
        Ok(branches) => {
            let id = branches.first().map(|b| b.id).unwrap_or(0);
            probes.push(EndpointProbe {
                name: "list branches",
                ok: true,
                detail: format!("{} branch(es)", branches.len()),
            });
            id
        }
        Err(e) => {
            probes.push(EndpointProbe {
                name: "list branches",
                ok: false,
                detail: e.to_string(),
            });
            0
        }
    };

    let first_string = match api.list_strings(branch_id, 1) {
        Ok(strings) => {
            probes.push(EndpointProbe {
                name: "list strings",
                ok: true,
                detail: format!("{} string(s) visible", strings.len()),
            });
            strings.into_iter().next()
        }
        Err(e) => {
            probes.push(EndpointProbe {
                name: "list strings",
                ok: false,
                detail: e.to_string(),
            });
            None
        }
    };

    if let Some(s) = first_string {
        match api.list_translations(s.id, "fr") {
            Ok(ts) => probes.push(EndpointProbe {
                name: "list translations",
                ok: true,
                detail: format!("{} translation(s) for {}", ts.len(), s.identifier),
            }),
            Err(e) => probes.push(EndpointProbe {
                name: "list translations",
                ok: false,
                detail: e.to_string(),
            }),
        }
    }

    probes
}
