use serde_json::{Map, Value};

// Top-level keys of the wtfismyip.com JSON response. Unknown keys are
// ignored; these are the only ones read.
const IP_ADDRESS_KEY: &str = "YourFuckingIPAddress";
const ISP_KEY: &str = "YourFuckingISP";
const LOCATION_KEY: &str = "YourFuckingLocation";
const CITY_KEY: &str = "YourFuckingCity";
const COUNTRY_KEY: &str = "YourFuckingCountry";
const VPN_KEY: &str = "YourFuckingVPN";
const TOR_EXIT_KEY: &str = "YourFuckingTorExit";

/// Normalized network information. Every field is independently optional;
/// absence means "unknown", not "false".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InternetInfo {
    pub ip_address: Option<String>,
    pub isp: Option<String>,
    pub location: Option<String>,
    pub vpn: Option<bool>,
    pub tor_exit: Option<bool>,
}

/// A display line derived from [`InternetInfo`]. `sensitive` marks content
/// the host should hide until the user performs a reveal gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    pub title: String,
    pub sensitive: bool,
}

/// Decodes a raw internet-info payload.
///
/// Returns `None` when the input is empty, not valid JSON, or not a JSON
/// object. String fields are trimmed and blank-to-absent; boolean fields
/// are only read when genuinely boolean, so a single wrong-typed field
/// never poisons the rest of the record.
pub fn decode_internet_info(bytes: &[u8]) -> Option<InternetInfo> {
    let payload: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(err) => {
            switch_logging::switch_debug!("internet info payload is not valid JSON: {err}");
            return None;
        }
    };
    let object = payload.as_object()?;

    let location = non_blank_string(object, LOCATION_KEY).or_else(|| {
        // Fallback composition requires both halves; one alone is not
        // enough to claim a location.
        let city = non_blank_string(object, CITY_KEY)?;
        let country = non_blank_string(object, COUNTRY_KEY)?;
        Some(format!("{city}, {country}"))
    });

    Some(InternetInfo {
        ip_address: non_blank_string(object, IP_ADDRESS_KEY),
        isp: non_blank_string(object, ISP_KEY),
        location,
        vpn: object.get(VPN_KEY).and_then(Value::as_bool),
        tor_exit: object.get(TOR_EXIT_KEY).and_then(Value::as_bool),
    })
}

fn non_blank_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    let trimmed = object.get(key)?.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl InternetInfo {
    /// Projects the record into display lines, skipping absent fields.
    /// Order is fixed: IP, ISP, Location, Tor Exit. The IP and Tor-exit
    /// lines are sensitive. The VPN flag is not rendered here; the host
    /// surfaces it as a separate status indicator.
    pub fn menu_lines(&self) -> Vec<MenuLine> {
        let mut lines = Vec::new();

        if let Some(ip_address) = &self.ip_address {
            lines.push(MenuLine {
                title: format!("IP: {ip_address}"),
                sensitive: true,
            });
        }
        if let Some(isp) = &self.isp {
            lines.push(MenuLine {
                title: format!("ISP: {isp}"),
                sensitive: false,
            });
        }
        if let Some(location) = &self.location {
            lines.push(MenuLine {
                title: format!("Location: {location}"),
                sensitive: false,
            });
        }
        if let Some(tor_exit) = self.tor_exit {
            lines.push(MenuLine {
                title: format!("Tor Exit: {}", if tor_exit { "Yes" } else { "No" }),
                sensitive: true,
            });
        }

        lines
    }
}
