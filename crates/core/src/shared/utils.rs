use alloy::primitives::U256;

pub const GWEI_DECIMALS: u8 = 9;
pub const ETH_DECIMALS: u8 = 18;

/// Formats an integer amount of the smallest unit as a decimal string with trailing
/// zeros removed, e.g. `1500000000` with 9 decimals becomes `"1.5"`.
pub fn format_units_trimmed(amount: U256, decimals: u8) -> String {
    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / divisor;
    let remainder = amount % divisor;

    if remainder.is_zero() {
        return format!("{}", whole);
    }

    let fraction = format!("{:0>width$}", remainder.to_string(), width = decimals as usize);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

pub fn format_eth(wei: U256) -> String {
    format_units_trimmed(wei, ETH_DECIMALS)
}

/// Formats a wei gas price as gwei rounded half up to two decimals.
pub fn format_gwei(wei: u128) -> String {
    let hundredths = wei.saturating_add(5_000_000) / 10_000_000;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
