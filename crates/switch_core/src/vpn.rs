// Markers for the two command-output formats. OS tool output drifts
// between versions; keeping the patterns here makes that a one-place fix.
const NC_LIST_HEADER: &str =
    "Available network connection services in the current set (*=enabled):";
const ENABLED_MARKER: char = '*';
const CONNECTED_TAG: &str = "(Connected)";
const TUNNEL_INTERFACE_PREFIX: &str = "utun";

/// VPN connectivity classified from command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VpnStatus {
    /// Neither source produced recognizable evidence.
    Unknown,
    /// The service list was readable and showed no connected service.
    Disconnected,
    /// At least one positive signal. `service_names` is empty when the
    /// evidence came from the routing table rather than a named service.
    Connected { service_names: Vec<String> },
}

impl VpnStatus {
    /// Tri-state readout for callers that only need a boolean-or-unknown
    /// summary.
    pub fn is_connected(&self) -> Option<bool> {
        match self {
            VpnStatus::Unknown => None,
            VpnStatus::Disconnected => Some(false),
            VpnStatus::Connected { .. } => Some(true),
        }
    }
}

/// Combined detector: named-service evidence from `scutil --nc list`
/// output wins; otherwise any tunnel interface in the `netstat -rn`
/// output counts as connected (with no attributable service name); a
/// readable-but-empty service list means disconnected; anything else is
/// unknown.
pub fn classify_vpn_status(nc_list_output: &str, netstat_output: &str) -> VpnStatus {
    let service_status = parse_nc_list_output(nc_list_output);
    if matches!(service_status, VpnStatus::Connected { .. }) {
        return service_status;
    }

    if !parse_netstat_tunnel_interfaces(netstat_output).is_empty() {
        return VpnStatus::Connected {
            service_names: Vec::new(),
        };
    }

    match service_status {
        VpnStatus::Disconnected => VpnStatus::Disconnected,
        _ => VpnStatus::Unknown,
    }
}

/// Parses `scutil --nc list` output.
///
/// Without the header line the text is not recognizable as service-list
/// output at all, so the result is [`VpnStatus::Unknown`] rather than
/// disconnected. With the header, every `* (Connected) <name>` line after
/// it contributes a service name in file order.
pub fn parse_nc_list_output(output: &str) -> VpnStatus {
    let Some(header_at) = output.find(NC_LIST_HEADER) else {
        switch_logging::switch_debug!("service list output missing header, cannot classify");
        return VpnStatus::Unknown;
    };

    let mut service_names = Vec::new();
    for line in output[header_at..].lines().skip(1) {
        let Some(entry) = line.trim().strip_prefix(ENABLED_MARKER) else {
            continue;
        };
        let Some(name) = entry.trim_start().strip_prefix(CONNECTED_TAG) else {
            continue;
        };
        service_names.push(name.trim().to_string());
    }

    if service_names.is_empty() {
        VpnStatus::Disconnected
    } else {
        VpnStatus::Connected { service_names }
    }
}

/// Extracts virtual-tunnel interface names (`utun` + digits) from
/// `netstat -rn` output, taking the last column of each row as the
/// outgoing interface. First-seen order, later duplicates removed. Any
/// appearance counts: default route, either half of a split default
/// route, or any other destination.
pub fn parse_netstat_tunnel_interfaces(output: &str) -> Vec<String> {
    let mut interfaces: Vec<String> = Vec::new();
    for line in output.lines() {
        let Some(interface) = line.split_whitespace().last() else {
            continue;
        };
        if is_tunnel_interface(interface) && !interfaces.iter().any(|seen| seen == interface) {
            interfaces.push(interface.to_string());
        }
    }
    interfaces
}

fn is_tunnel_interface(name: &str) -> bool {
    name.strip_prefix(TUNNEL_INTERFACE_PREFIX)
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
}
