//! Reservation approval rows served by `reservation/getDataApproval`.

use crate::shared::{DynamicRecord, PagedResponse};

pub type ReservationRecord = DynamicRecord;
pub type ApprovalListResponse = PagedResponse<ReservationRecord>;

pub mod fields {
    pub const TRANSACTION_ID: &str = "transactionID";
    pub const RESERVATION_DATE: &str = "reservationDate";
    pub const START_TIME: &str = "startTime";
    pub const ROOM_NAME: &str = "roomName";
    pub const MJ_MENGETAHUI: &str = "mjMengetahui";
    pub const CREATED_BY: &str = "createdBy";
    pub const STATUS: &str = "status";
}

/// Fields with a fixed place in the approval table. They never show up as
/// dynamic columns.
pub const PINNED_FIELDS: [&str; 7] = [
    fields::TRANSACTION_ID,
    fields::RESERVATION_DATE,
    fields::START_TIME,
    fields::ROOM_NAME,
    fields::MJ_MENGETAHUI,
    fields::CREATED_BY,
    fields::STATUS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_response_from_server_json() {
        let body = r#"{
            "statusCode": 200,
            "data": [{
                "transactionID": "T1",
                "reservationDate": "01 Jan 2024",
                "startTime": "09:00",
                "roomName": "Hall A",
                "purpose": "Meeting",
                "mjMengetahui": "Yes",
                "createdBy": "Alice",
                "status": "Approved"
            }],
            "totalData": 1
        }"#;
        let resp: ApprovalListResponse = serde_json::from_str(body).unwrap();
        assert!(resp.has_rows());
        assert_eq!(resp.total_data, 1);

        let first = &resp.data[0];
        assert_eq!(first.display(fields::TRANSACTION_ID).as_deref(), Some("T1"));
        let dynamic: Vec<&str> = first
            .field_names()
            .filter(|f| !PINNED_FIELDS.contains(f))
            .collect();
        assert_eq!(dynamic, vec!["purpose"]);
    }
}
