// 日历日窗口计算
// "今天"和日期筛选都按服务器本地时区的自然日计算，
// 再换算成UTC与存储的取货时间比较

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// 计算某个本地日历日的UTC时间窗口
///
/// 窗口为 [00:00:00.000, 23:59:59.999]，与订单筛选和
/// 时段当日接单数使用同一定义
pub fn local_day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(NaiveTime::MIN);
    let end = start + Duration::days(1) - Duration::milliseconds(1);
    (local_naive_to_utc(start), local_naive_to_utc(end))
}

/// 今天的UTC时间窗口 (本地时区自然日)
pub fn today_window() -> (DateTime<Utc>, DateTime<Utc>) {
    local_day_window(Local::now().date_naive())
}

fn local_naive_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        // 夏令时折叠取较早一侧；本地不存在的时刻按UTC兜底
        LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&naive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_spans_exactly_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let (start, end) = local_day_window(date);
        assert_eq!(end - start, Duration::days(1) - Duration::milliseconds(1));
    }

    #[test]
    fn test_window_boundaries_in_local_time() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let (start, end) = local_day_window(date);

        let start_local = start.with_timezone(&Local);
        assert_eq!(start_local.date_naive(), date);
        assert_eq!(start_local.time(), NaiveTime::MIN);

        let end_local = end.with_timezone(&Local);
        assert_eq!(end_local.date_naive(), date);
        assert_eq!(
            end_local.time(),
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
    }

    #[test]
    fn test_adjacent_days_do_not_overlap() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let next = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let (_, end) = local_day_window(day);
        let (next_start, _) = local_day_window(next);
        assert!(end < next_start);
    }
}
