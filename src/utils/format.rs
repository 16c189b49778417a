/// Rewrite a form date (`YYYY-MM-DD`) into the wire representation
/// (`DD/MM/YYYY`). Purely positional; no calendar interpretation.
/// Anything that does not split into three parts is passed through.
pub fn journey_date_to_wire(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return date.to_string();
    }
    format!("{}/{}/{}", parts[2], parts[1], parts[0])
}

/// Group a price for display with zero fractional digits, using the
/// Indian convention: last three digits, then groups of two
/// (`123456` → `1,23,456`).
pub fn group_price(price: f64) -> String {
    let rounded = price.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    let digits = rounded.abs().to_string();

    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail.to_string()];
    while head.len() > 2 {
        let (rest, group) = head.split_at(head.len() - 2);
        groups.push(group.to_string());
        head = rest;
    }
    groups.push(head.to_string());
    groups.reverse();

    format!("{}{}", sign, groups.join(","))
}
