use bigdecimal::{BigDecimal, Zero};

/// 四舍五入到分 (两位小数)
pub fn round2(value: &BigDecimal) -> BigDecimal {
    value.round(2)
}

/// 导出/提示文本统一使用两位小数
pub fn fmt_money(value: &BigDecimal) -> String {
    round2(value).with_scale(2).to_string()
}

pub fn sum<'a, I>(values: I) -> BigDecimal
where
    I: IntoIterator<Item = &'a BigDecimal>,
{
    values
        .into_iter()
        .fold(BigDecimal::zero(), |acc, v| acc + v)
}

pub fn min(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    if a < b {
        a.clone()
    } else {
        b.clone()
    }
}

pub fn max(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    if a > b {
        a.clone()
    } else {
        b.clone()
    }
}

/// 向上取整的整数商, divisor <= 0 时返回 0
pub fn ceil_div(value: &BigDecimal, divisor: &BigDecimal) -> u64 {
    if *divisor <= BigDecimal::zero() || *value <= BigDecimal::zero() {
        return 0;
    }
    let quotient = value / divisor;
    let truncated = quotient.with_scale(0);
    let whole: u64 = truncated.to_string().parse().unwrap_or(0);
    if truncated < quotient {
        whole + 1
    } else {
        whole
    }
}
