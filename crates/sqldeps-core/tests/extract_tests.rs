// Integration tests for object-name extraction
use pretty_assertions::assert_eq;
use sqldeps_core::error::ExtractError;
use sqldeps_core::{extract_object_names, ObjectNameSet};

fn extract(sql: &str) -> ObjectNameSet {
    extract_object_names(sql).expect("extraction should succeed")
}

fn sorted(names: &ObjectNameSet) -> Vec<&str> {
    let mut all: Vec<&str> = names.iter().collect();
    all.sort_unstable();
    all
}

#[test]
fn test_bare_table_name() {
    let names = extract("SELECT * FROM employees");
    assert_eq!(sorted(&names), vec!["EMPLOYEES"]);
}

#[test]
fn test_schema_qualified_name() {
    let names = extract("SELECT * FROM hr.employees");
    assert_eq!(sorted(&names), vec!["HR.EMPLOYEES"]);
}

#[test]
fn test_case_insensitivity_of_unquoted_names() {
    let lower = extract("select e.id from hr.employees e");
    let upper = extract("SELECT E.ID FROM HR.EMPLOYEES E");
    let mixed = extract("Select e.id From Hr.Employees e");
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
    assert_eq!(sorted(&lower), vec!["HR.EMPLOYEES"]);
}

#[test]
fn test_duplicate_references_collapse() {
    let names = extract(
        "SELECT * FROM employees;\n\
         SELECT * FROM EMPLOYEES;\n\
         SELECT * FROM Employees e WHERE e.id = 1;",
    );
    assert_eq!(names.len(), 1);
    assert!(names.contains("employees"));
}

#[test]
fn test_join_collects_both_sides() {
    let names = extract("SELECT * FROM orders o JOIN customers c ON o.customer_id = c.id");
    assert_eq!(sorted(&names), vec!["CUSTOMERS", "ORDERS"]);
}

#[test]
fn test_aliases_are_not_collected() {
    let names = extract("SELECT e.id, o.total FROM employees e, orders o WHERE o.emp_id = e.id");
    assert_eq!(sorted(&names), vec!["EMPLOYEES", "ORDERS"]);
}

#[test]
fn test_table_only_inside_exists_subquery() {
    let names = extract(
        "SELECT u.id FROM users u WHERE EXISTS (SELECT 1 FROM payments p WHERE p.user_id = u.id)",
    );
    assert!(names.contains("PAYMENTS"), "subquery table missed: {:?}", names);
    assert!(names.contains("USERS"));
}

#[test]
fn test_nested_subquery_in_projection() {
    let names =
        extract("SELECT (SELECT COUNT(*) FROM audit_log a WHERE a.user_id = u.id) FROM users u");
    assert!(names.contains("AUDIT_LOG"));
    assert!(names.contains("USERS"));
}

#[test]
fn test_insert_target_is_collected() {
    let names = extract("INSERT INTO app.audit_log (id) VALUES (1)");
    assert_eq!(sorted(&names), vec!["APP.AUDIT_LOG"]);
}

#[test]
fn test_update_target_is_collected() {
    let names = extract("UPDATE app.users SET name = 'x' WHERE id = 1");
    assert_eq!(sorted(&names), vec!["APP.USERS"]);
}

#[test]
fn test_delete_target_is_collected() {
    let names = extract("DELETE FROM event_log WHERE created < 0");
    assert_eq!(sorted(&names), vec!["EVENT_LOG"]);
}

#[test]
fn test_set_operation_collects_all_branches() {
    let names = extract("SELECT id FROM current_users UNION ALL SELECT id FROM archived_users");
    assert_eq!(sorted(&names), vec!["ARCHIVED_USERS", "CURRENT_USERS"]);
}

#[test]
fn test_cte_body_tables_are_collected() {
    let names = extract(
        "WITH recent AS (SELECT * FROM raw_orders WHERE age < 7) \
         SELECT * FROM recent JOIN customers ON recent.customer_id = customers.id",
    );
    assert!(names.contains("RAW_ORDERS"));
    assert!(names.contains("CUSTOMERS"));
}

#[test]
fn test_quoted_identifiers_keep_case_and_lose_quotes() {
    let names = extract(r#"SELECT * FROM "MixedCase"."Table""#);
    assert_eq!(sorted(&names), vec!["MixedCase.Table"]);
}

#[test]
fn test_quoted_and_unquoted_spellings_collapse() {
    let names = extract(r#"SELECT * FROM "Audit_Log"; SELECT * FROM audit_log"#);
    assert_eq!(names.len(), 1);
    assert!(names.contains("AUDIT_LOG"));
    // First spelling seen is the one kept
    assert_eq!(names.iter().next(), Some("Audit_Log"));
}

#[test]
fn test_database_link_suffix_is_stripped() {
    let names = extract("SELECT * FROM dept@dblink d WHERE d.id = 1");
    assert_eq!(sorted(&names), vec!["DEPT"]);
    assert!(!names.contains("DBLINK"));
}

#[test]
fn test_qualified_name_with_database_link() {
    let names = extract("SELECT * FROM hr.employees@remote_site");
    assert_eq!(sorted(&names), vec!["HR.EMPLOYEES"]);
}

#[test]
fn test_links_to_different_sites_conflate() {
    let names = extract("SELECT * FROM dept@link1 UNION ALL SELECT * FROM dept@link2");
    assert_eq!(sorted(&names), vec!["DEPT"]);
}

#[test]
fn test_mixed_statement_batch() {
    let names = extract(
        "SELECT e.employee_id FROM hr.employees e\n\
         JOIN sales.orders o ON o.emp_id = e.employee_id\n\
         WHERE EXISTS (SELECT 1 FROM dept@dblink d WHERE d.id = e.department_id);\n\
         INSERT INTO app.audit_log (id) VALUES (1);",
    );
    assert_eq!(
        sorted(&names),
        vec!["APP.AUDIT_LOG", "DEPT", "HR.EMPLOYEES", "SALES.ORDERS"]
    );
}

#[test]
fn test_empty_input_is_an_empty_set() {
    assert!(extract("").is_empty());
    assert!(extract("   \n\t  ").is_empty());
}

#[test]
fn test_comment_only_input_is_an_empty_set() {
    assert!(extract("-- nothing to see here\n").is_empty());
    assert!(extract("/* block comment */").is_empty());
}

#[test]
fn test_parse_failure_returns_no_partial_result() {
    let result = extract_object_names("SELECT * FROM employees; SELECT FROM WHERE");
    match result {
        Err(ExtractError::Parse(_)) => {}
        other => panic!("expected a parse failure, got {:?}", other.map(|n| n.into_vec())),
    }
}

#[test]
fn test_parse_failure_on_garbage() {
    assert!(extract_object_names("this is not sql at all !!!").is_err());
}
