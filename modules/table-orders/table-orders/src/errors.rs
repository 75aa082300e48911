//! Error catalog for the table orders API.
//!
//! Every problem response carries one of these codes; the status and title
//! are fixed per code.

use axum::http::StatusCode;

use crate::api::problem::Problem;

/// Static error definition from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ErrDef {
    pub status: StatusCode,
    pub title: &'static str,
    pub code: &'static str,
}

impl ErrDef {
    pub fn as_problem(&self, detail: impl Into<String>) -> Problem {
        Problem::new(self.status, self.title, detail)
            .with_code(self.code)
            .with_type(format!("urn:table-orders:error:{}", self.code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    UnknownMenuItem,
    Validation,
    InvalidTableNumber,
    InvalidItemId,
    MalformedRequest,
    ItemNotFound,
    InternalDatabase,
}

impl ErrorCode {
    pub const ALL: [Self; 7] = [
        Self::UnknownMenuItem,
        Self::Validation,
        Self::InvalidTableNumber,
        Self::InvalidItemId,
        Self::MalformedRequest,
        Self::ItemNotFound,
        Self::InternalDatabase,
    ];

    #[must_use]
    pub const fn def(&self) -> ErrDef {
        match self {
            Self::UnknownMenuItem => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Unknown Menu Item",
                code: "table_orders.order.unknown_menu_item.v1",
            },
            Self::Validation => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Validation Failed",
                code: "table_orders.order.validation.v1",
            },
            Self::InvalidTableNumber => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Invalid Table Number",
                code: "table_orders.table.invalid_number.v1",
            },
            Self::InvalidItemId => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Invalid Item Id",
                code: "table_orders.item.invalid_id.v1",
            },
            Self::MalformedRequest => ErrDef {
                status: StatusCode::BAD_REQUEST,
                title: "Malformed Request",
                code: "table_orders.request.malformed.v1",
            },
            Self::ItemNotFound => ErrDef {
                status: StatusCode::NOT_FOUND,
                title: "Order Item Not Found",
                code: "table_orders.item.not_found.v1",
            },
            Self::InternalDatabase => ErrDef {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                title: "Internal Database Error",
                code: "table_orders.internal.database.v1",
            },
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.def().status
    }

    pub fn as_problem(&self, detail: impl Into<String>) -> Problem {
        self.def().as_problem(detail)
    }

    /// Create a Problem with `instance` and optional `trace_id` context.
    pub fn with_context(
        &self,
        detail: impl Into<String>,
        instance: &str,
        trace_id: Option<String>,
    ) -> Problem {
        let mut p = self.as_problem(detail).with_instance(instance);
        if let Some(tid) = trace_id {
            p = p.with_trace_id(tid);
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn error_codes_are_unique() {
        let codes: HashSet<_> = ErrorCode::ALL.iter().map(|c| c.def().code).collect();
        assert_eq!(codes.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn error_code_to_problem_works() {
        let problem = ErrorCode::ItemNotFound.as_problem("Order item not found");

        assert_eq!(problem.status, StatusCode::NOT_FOUND);
        assert_eq!(problem.title, "Order Item Not Found");
        assert_eq!(problem.code, "table_orders.item.not_found.v1");
        assert_eq!(
            problem.type_url,
            "urn:table-orders:error:table_orders.item.not_found.v1"
        );
    }

    #[test]
    fn with_context_attaches_instance_and_trace() {
        let problem = ErrorCode::UnknownMenuItem.with_context(
            "Sushi",
            "/order",
            Some("trace-1".to_owned()),
        );

        assert_eq!(problem.instance, "/order");
        assert_eq!(problem.trace_id.as_deref(), Some("trace-1"));
        assert_eq!(problem.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn only_database_errors_are_server_errors() {
        for code in ErrorCode::ALL {
            assert_eq!(
                code.status().is_server_error(),
                code == ErrorCode::InternalDatabase,
                "{code:?}"
            );
        }
    }
}
