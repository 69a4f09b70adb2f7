use gcf_entities::address::NormalizedAddress;
use std::fmt::Write as _;

pub fn render_text(addr: &NormalizedAddress) -> String {
    if addr.is_empty() {
        return "No address data\n".to_owned();
    }
    let NormalizedAddress {
        latitude,
        longitude,
        bounds,
        street_number,
        street_name,
        city,
        zipcode,
        county,
        region_code,
        country,
        timezone,
        formatted_address,
    } = addr;
    let mut out = String::new();
    if let Some(v) = formatted_address {
        let _ = writeln!(out, "{v}");
    }
    if let (Some(lat), Some(lon)) = (latitude, longitude) {
        let _ = writeln!(out, "  Position: {lat}, {lon}");
    }
    if let Some(b) = bounds {
        let _ = writeln!(
            out,
            "  Bounds: {}, {} - {}, {}",
            b.south, b.west, b.north, b.east
        );
    }
    let street = [street_number.as_deref(), street_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if !street.is_empty() {
        let _ = writeln!(out, "  Street: {street}");
    }
    for (label, value) in [
        ("City", city),
        ("Zipcode", zipcode),
        ("County", county),
        ("Region", region_code),
        ("Country", country),
        ("Timezone", timezone),
    ] {
        if let Some(v) = value {
            let _ = writeln!(out, "  {label}: {v}");
        }
    }
    out
}
