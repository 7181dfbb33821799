//! 中文数字转整数 (仅覆盖月度次数常见的小量级: 十、十三、二十、二十三、一百零五 …)

fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '零' => Some(0),
        '一' => Some(1),
        '二' | '两' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

fn unit_value(ch: char) -> Option<u32> {
    match ch {
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1000),
        '万' => Some(10000),
        _ => None,
    }
}

/// 非零个位数字 (一 ~ 九)
fn nonzero_digit(ch: char) -> Option<u32> {
    digit_value(ch).filter(|&v| v > 0)
}

/// 阿拉伯数字串或小量级中文数字 → 整数; 无法识别或结果为 0 时返回 None
pub fn cn_to_number(raw: &str) -> Option<u32> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().all(|c| c.is_ascii_digit()) {
        return s.parse().ok();
    }

    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        ['十'] => return Some(10),
        ['十', d] => {
            if let Some(v) = nonzero_digit(*d) {
                return Some(10 + v);
            }
        }
        [d, '十'] => {
            if let Some(v) = nonzero_digit(*d) {
                return Some(v * 10);
            }
        }
        [a, '十', b] => {
            if let (Some(tens), Some(ones)) = (nonzero_digit(*a), nonzero_digit(*b)) {
                return Some(tens * 10 + ones);
            }
        }
        _ => {}
    }

    // 兜底: 按位累加, 单位字符作用于当前累积的数字 (缺省为 1)
    let mut total: u32 = 0;
    let mut current: u32 = 0;
    for ch in chars {
        if let Some(unit) = unit_value(ch) {
            let base = if current == 0 { 1 } else { current };
            total = total.checked_add(base.checked_mul(unit)?)?;
            current = 0;
        } else {
            let digit = digit_value(ch)?;
            current = current.checked_mul(10)?.checked_add(digit)?;
        }
    }
    total = total.checked_add(current)?;
    if total == 0 {
        None
    } else {
        Some(total)
    }
}
