use std::sync::Once;

use pretty_assertions::assert_eq;
use switch_core::{
    classify_vpn_status, parse_nc_list_output, parse_netstat_tunnel_interfaces, VpnStatus,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(switch_logging::initialize_for_tests);
}

const NC_LIST_HEADER: &str =
    "Available network connection services in the current set (*=enabled):";

fn connected(names: &[&str]) -> VpnStatus {
    VpnStatus::Connected {
        service_names: names.iter().map(|n| n.to_string()).collect(),
    }
}

#[test]
fn parse_connected_service() {
    init_logging();
    let output = format!("{NC_LIST_HEADER}\n* (Connected) Work VPN [IPSec]\n");

    let status = parse_nc_list_output(&output);
    assert_eq!(status, connected(&["Work VPN [IPSec]"]));
    assert_eq!(status.is_connected(), Some(true));
}

#[test]
fn parse_disconnected_when_no_connected_entries() {
    init_logging();
    let output = format!(
        "{NC_LIST_HEADER}\n\
         * (Disconnected) Work VPN [IPSec]\n\
         * (Disconnected) Personal VPN [IKEv2]\n"
    );

    let status = parse_nc_list_output(&output);
    assert_eq!(status, VpnStatus::Disconnected);
    assert_eq!(status.is_connected(), Some(false));
}

#[test]
fn parse_unknown_when_output_does_not_contain_service_data() {
    init_logging();
    let status = parse_nc_list_output("unexpected output");
    assert_eq!(status, VpnStatus::Unknown);
    assert_eq!(status.is_connected(), None);
}

#[test]
fn parse_multiple_connected_services_in_file_order() {
    init_logging();
    let output = format!(
        "{NC_LIST_HEADER}\n\
         * (Connected) Work VPN [IPSec]\n\
         * (Connected) Home VPN [IKEv2]\n\
         * (Disconnected) Backup VPN [L2TP]\n"
    );

    let status = parse_nc_list_output(&output);
    assert_eq!(status, connected(&["Work VPN [IPSec]", "Home VPN [IKEv2]"]));
}

#[test]
fn parse_disconnected_when_header_present_but_no_services() {
    init_logging();
    let output = format!("{NC_LIST_HEADER}\n");
    assert_eq!(parse_nc_list_output(&output), VpnStatus::Disconnected);
}

#[test]
fn parse_empty_output_returns_unknown() {
    init_logging();
    assert_eq!(parse_nc_list_output(""), VpnStatus::Unknown);
}

#[test]
fn netstat_detects_utun_split_tunnel_routes() {
    init_logging();
    let output = "\
Routing tables

Internet:
Destination        Gateway            Flags               Netif Expire
0/1                10.31.141.13       UGScg              utun10
128.0/1            10.31.141.13       UGSc               utun10
default            172.16.0.1         UGScg                 en0
";

    assert_eq!(parse_netstat_tunnel_interfaces(output), vec!["utun10"]);
}

#[test]
fn netstat_detects_default_utun_route() {
    init_logging();
    let output = "\
Routing tables

Internet:
Destination        Gateway            Flags               Netif Expire
default            10.0.0.1           UGScg              utun5
";

    assert_eq!(parse_netstat_tunnel_interfaces(output), vec!["utun5"]);
}

#[test]
fn netstat_deduplicates_interfaces() {
    init_logging();
    let output = "\
Routing tables

Internet:
Destination        Gateway            Flags               Netif Expire
0/1                10.31.141.13       UGScg              utun10
128.0/1            10.31.141.13       UGSc               utun10
10.0.0.0/8         10.31.141.13       UGSc               utun10
";

    assert_eq!(parse_netstat_tunnel_interfaces(output), vec!["utun10"]);
}

#[test]
fn netstat_returns_empty_for_empty_output() {
    init_logging();
    assert_eq!(
        parse_netstat_tunnel_interfaces(""),
        Vec::<String>::new()
    );
}

#[test]
fn netstat_ignores_non_utun_routes() {
    init_logging();
    let output = "\
Routing tables

Internet:
Destination        Gateway            Flags               Netif Expire
default            172.16.0.1         UGScg                 en0
172.16/21          link#11            UCS                   en0
";

    assert_eq!(parse_netstat_tunnel_interfaces(output), Vec::<String>::new());
}

#[test]
fn netstat_requires_digits_after_tunnel_prefix() {
    init_logging();
    let output = "\
Destination        Gateway            Flags               Netif Expire
default            10.0.0.1           UGScg              utun
0/1                10.0.0.1           UGScg              utunX
128.0/1            10.0.0.1           UGSc               utun7
";

    assert_eq!(parse_netstat_tunnel_interfaces(output), vec!["utun7"]);
}

#[test]
fn classify_prefers_named_service_evidence() {
    init_logging();
    let nc_list = format!("{NC_LIST_HEADER}\n* (Connected) Work VPN [IPSec]\n");
    let netstat = "default            10.0.0.1           UGScg              utun5\n";

    let status = classify_vpn_status(&nc_list, netstat);
    assert_eq!(status, connected(&["Work VPN [IPSec]"]));
}

#[test]
fn classify_uses_route_evidence_when_services_disconnected() {
    init_logging();
    let nc_list = format!("{NC_LIST_HEADER}\n* (Disconnected) Work VPN [IPSec]\n");
    let netstat = "0/1                10.31.141.13       UGScg              utun10\n";

    let status = classify_vpn_status(&nc_list, netstat);
    assert_eq!(status, connected(&[]));
    assert_eq!(status.is_connected(), Some(true));
}

#[test]
fn classify_uses_route_evidence_when_service_list_unrecognizable() {
    init_logging();
    let netstat = "default            10.0.0.1           UGScg              utun5\n";

    let status = classify_vpn_status("garbled", netstat);
    assert_eq!(status, connected(&[]));
}

#[test]
fn classify_reports_disconnected_without_route_evidence() {
    init_logging();
    let nc_list = format!("{NC_LIST_HEADER}\n* (Disconnected) Work VPN [IPSec]\n");
    let netstat = "default            172.16.0.1         UGScg                 en0\n";

    assert_eq!(classify_vpn_status(&nc_list, netstat), VpnStatus::Disconnected);
}

#[test]
fn classify_reports_unknown_when_neither_source_helps() {
    init_logging();
    assert_eq!(classify_vpn_status("", ""), VpnStatus::Unknown);
}
