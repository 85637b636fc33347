//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 响应模型 (shared::models)

use crate::db::models as db;
use shared::models as api;
use shared::util::{display_id, format_join_date};

impl From<db::Employee> for api::EmployeeResponse {
    fn from(e: db::Employee) -> Self {
        Self {
            id: e.key(),
            name: e.name,
            email: e.email,
            address: e.address,
            date_of_join: e.date_of_join.as_ref().map(format_join_date),
            blood_group: e.blood_group,
            employee_id: None,
        }
    }
}

/// 列表响应：按存储返回的顺序附加位置编号 `employeeId`
pub fn with_display_ids(employees: Vec<db::Employee>) -> Vec<api::EmployeeResponse> {
    employees
        .into_iter()
        .enumerate()
        .map(|(index, e)| api::EmployeeResponse {
            employee_id: Some(display_id(index)),
            ..e.into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use surrealdb::RecordId;

    fn employee(key: &str) -> db::Employee {
        db::Employee {
            id: RecordId::from_table_key("employee", key.to_string()),
            name: format!("name-{key}"),
            email: format!("{key}@example.com"),
            address: String::new(),
            date_of_join: Some(chrono::Utc.with_ymd_and_hms(2021, 12, 31, 23, 0, 0).unwrap()),
            blood_group: None,
        }
    }

    #[test]
    fn single_record_has_no_display_id() {
        let resp: api::EmployeeResponse = employee("a1").into();
        assert_eq!(resp.id, "a1");
        assert_eq!(resp.date_of_join.as_deref(), Some("2021-12-31"));
        assert_eq!(resp.employee_id, None);
    }

    #[test]
    fn list_numbers_records_by_position() {
        let list = with_display_ids(vec![employee("z"), employee("a"), employee("m")]);
        let ids: Vec<_> = list.iter().map(|e| e.employee_id.as_deref().unwrap()).collect();
        assert_eq!(ids, ["0001", "0002", "0003"]);
        assert_eq!(list[0].id, "z");
    }
}
