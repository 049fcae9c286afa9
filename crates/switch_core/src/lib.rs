//! Switch core: pure inference over host-environment data.
//!
//! Three independent, side-effect-free components: browser candidate
//! ranking, internet-info payload decoding, and VPN status
//! classification. The host owns timers, process execution, and HTTP;
//! this crate only transforms data already in memory.
mod browser;
mod netinfo;
mod vpn;

pub use browser::{
    deduplicate_by_display_name, eligible_handler_ids, install_location_rank,
    is_preferred_install_location, ordered_bundle_ids, BrowserCandidate,
    DEFAULT_PREFERRED_BROWSERS,
};
pub use netinfo::{decode_internet_info, InternetInfo, MenuLine};
pub use vpn::{
    classify_vpn_status, parse_nc_list_output, parse_netstat_tunnel_interfaces, VpnStatus,
};
