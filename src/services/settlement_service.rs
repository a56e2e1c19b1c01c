// 结算服务
// 结算行由平台打款流程生成，这里只负责查询和汇总

use sqlx::PgPool;
use uuid::Uuid;
use crate::models::{Settlement, SettlementStatus, SettlementSummary};
use super::ServiceError;

/// 结算服务
pub struct SettlementService {
    pool: PgPool,
}

impl SettlementService {
    /// 创建新的结算服务实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 查询结算记录，按日期倒序
    ///
    /// 不做期间过滤: 期间选择在客户端完成，这里始终返回全量
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    pub async fn list_settlements(&self, store_id: Uuid) -> Result<Vec<Settlement>, ServiceError> {
        let settlements = sqlx::query_as::<_, Settlement>(
            "SELECT * FROM settlements WHERE store_id = $1 ORDER BY date DESC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(settlements)
    }

    /// 汇总全量结算记录
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    pub async fn get_summary(&self, store_id: Uuid) -> Result<SettlementSummary, ServiceError> {
        let settlements = self.list_settlements(store_id).await?;
        Ok(summarize(&settlements))
    }
}

/// 对结算记录求和
///
/// totalAmount/totalCommission/totalNet 对全量求和，
/// pendingAmount 只累计待打款记录的到手金额
pub fn summarize(settlements: &[Settlement]) -> SettlementSummary {
    let mut summary = SettlementSummary {
        total_amount: 0,
        total_commission: 0,
        total_net: 0,
        pending_amount: 0,
    };

    for settlement in settlements {
        summary.total_amount += i64::from(settlement.total_amount);
        summary.total_commission += i64::from(settlement.commission);
        summary.total_net += i64::from(settlement.net_amount);
        if settlement.status == SettlementStatus::Pending {
            summary.pending_amount += i64::from(settlement.net_amount);
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn settlement(
        total_amount: i32,
        commission: i32,
        net_amount: i32,
        status: SettlementStatus,
    ) -> Settlement {
        Settlement {
            id: Uuid::new_v4(),
            store_id: Uuid::new_v4(),
            date: Utc::now(),
            total_orders: 10,
            total_amount,
            commission,
            net_amount,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_summarize_demo_settlements() {
        let settlements = vec![
            settlement(84000, 8400, 75600, SettlementStatus::Completed),
            settlement(63000, 6300, 56700, SettlementStatus::Pending),
        ];

        let summary = summarize(&settlements);
        assert_eq!(summary.total_amount, 147000);
        assert_eq!(summary.total_commission, 14700);
        assert_eq!(summary.total_net, 132300);
        assert_eq!(summary.pending_amount, 56700);
    }

    #[test]
    fn test_summarize_empty_set() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_amount, 0);
        assert_eq!(summary.pending_amount, 0);
    }

    #[test]
    fn test_pending_amount_ignores_completed() {
        let settlements = vec![settlement(84000, 8400, 75600, SettlementStatus::Completed)];
        let summary = summarize(&settlements);
        assert_eq!(summary.total_net, 75600);
        assert_eq!(summary.pending_amount, 0);
    }
}
