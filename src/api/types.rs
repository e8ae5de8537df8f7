//! Request types for the lineage-tracking endpoints

use serde::Serialize;

/// Request body for the table-lineage endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TableLineageRequest {
    /// Fully qualified table name (catalog.schema.table)
    pub table_name: String,
    /// Include notebook, job, or dashboard lineage when available.
    /// Omitted from the wire form when false; the server reads absence
    /// as false.
    #[serde(skip_serializing_if = "is_false")]
    pub include_entity_lineage: bool,
}

/// Request body for the column-lineage endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ColumnLineageRequest {
    /// Fully qualified table name (catalog.schema.table)
    pub table_name: String,
    /// Column name
    pub column_name: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_table_request_includes_flag_when_true() {
        let request = TableLineageRequest {
            table_name: "catalog1.schema1.table1".to_string(),
            include_entity_lineage: true,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"table_name":"catalog1.schema1.table1","include_entity_lineage":true}"#
        );
    }

    #[test]
    fn test_table_request_omits_flag_when_false() {
        let request = TableLineageRequest {
            table_name: "catalog1.schema1.table1".to_string(),
            include_entity_lineage: false,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"table_name":"catalog1.schema1.table1"}"#);
    }

    #[test]
    fn test_column_request_carries_exactly_two_fields() {
        let request = ColumnLineageRequest {
            table_name: "c.s.t".to_string(),
            column_name: "col".to_string(),
        };
        let value: Value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["table_name"], "c.s.t");
        assert_eq!(object["column_name"], "col");
    }
}
