use bigdecimal::BigDecimal;
use serde::Serialize;

/// 个人跨月合计与封顶拆分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationRow {
    pub name: String,
    pub raw: BigDecimal,
    pub capped_pay: BigDecimal,
    pub overflow: BigDecimal,
}

/// 代收来源
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub source_person: String,
    pub amount: BigDecimal,
}

/// 代收人: 封顶后仍有剩余容量的账户
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collector {
    pub name: String,
    pub remaining_capacity: BigDecimal,
    pub received_from: Vec<Receipt>,
}

/// 转账通知 (代收人 → 实际应得者)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transfer {
    pub from_collector: String,
    pub to_original_earner: String,
    pub amount: BigDecimal,
    pub reason: String,
}

/// 金额分配表 (E 表) 的一行: 每个账户的最终到账
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSettlement {
    pub name: String,
    pub raw: BigDecimal,
    pub capped_pay: BigDecimal,
    pub overflow: BigDecimal,
    pub received_from: Vec<Receipt>,
    pub final_received: BigDecimal,
    pub remaining_capacity: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConservationCheck {
    pub total_raw: BigDecimal,
    pub total_final: BigDecimal,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    pub rows: Vec<AccountSettlement>,
    pub transfers: Vec<Transfer>,
    pub warnings: Vec<String>,
    pub conservation: ConservationCheck,
}
