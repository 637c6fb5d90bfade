use pretty_assertions::assert_eq;
use rowbind_core::binding::{Binding, NestedBinding};
use rowbind_core::schema::app::{self, EntityId, PropertyId};
use rowbind_core::schema::db::{self, Table};
use std::sync::Arc;

const DEPARTMENT: EntityId = EntityId(0);
const EMPLOYEE: EntityId = EntityId(1);

const DEPARTMENT_NAME: PropertyId = DEPARTMENT.property(1);

const EMPLOYEE_NAME: PropertyId = EMPLOYEE.property(1);
const EMPLOYEE_DEPARTMENT: PropertyId = EMPLOYEE.property(5);
const EMPLOYEE_MANAGER: PropertyId = EMPLOYEE.property(6);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Schema:
///   Department { id, name, location }
///   Employee { id, name, job, hire_date, salary, department: Department, manager: Employee? }
fn schema() -> Arc<app::Schema> {
    let mut builder = app::Schema::builder();
    let department = builder.declare("Department");
    let employee = builder.declare("Employee");
    assert_eq!(department, DEPARTMENT);
    assert_eq!(employee, EMPLOYEE);

    builder
        .entity(department)
        .scalar("id", app::Type::I32)
        .scalar("name", app::Type::String)
        .scalar("location", app::Type::String);

    builder
        .entity(employee)
        .scalar("id", app::Type::I32)
        .scalar("name", app::Type::String)
        .scalar("job", app::Type::String)
        .scalar("hire_date", app::Type::Date)
        .scalar("salary", app::Type::I64)
        .entity("department", department)
        .entity("manager", employee)
        .nullable();

    Arc::new(builder.build().unwrap())
}

fn employees(schema: &Arc<app::Schema>) -> Table {
    Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE))
}

#[test]
fn bind_scalar_property() {
    init_logging();
    let schema = schema();
    let mut table = employees(&schema);

    let id = table
        .register_column("name", db::Type::VarChar(128))
        .unwrap()
        .bind_to(|e| e.get("name"))
        .unwrap();

    assert_eq!(
        table.column(id).binding(),
        Some(&Binding::Nested(NestedBinding::new([EMPLOYEE_NAME])))
    );
}

#[test]
fn bind_nested_path_preserves_read_order() {
    init_logging();
    let schema = schema();
    let mut table = employees(&schema);

    let id = table
        .register_column("manager_department_name", db::Type::Text)
        .unwrap()
        .bind_to(|e| e.get("manager").get("department").get("name"))
        .unwrap();

    let nested = table.column(id).binding().unwrap().expect_nested();
    assert_eq!(
        nested.path.as_slice(),
        &[EMPLOYEE_MANAGER, EMPLOYEE_DEPARTMENT, DEPARTMENT_NAME]
    );
    assert_eq!(nested.terminal(), DEPARTMENT_NAME);
    assert_eq!(
        nested.path.display(&schema).to_string(),
        "manager.department.name"
    );
}

#[test]
fn bind_to_entity_typed_property() {
    let schema = schema();
    let mut table = employees(&schema);

    let id = table
        .register_column("department_id", db::Type::Integer(4))
        .unwrap()
        .bind_to(|e| e.get("department"))
        .unwrap();

    let binding = table.column(id).binding().unwrap();
    assert!(binding.is_nested());
    assert_eq!(binding.first_property(), EMPLOYEE_DEPARTMENT);
}

#[test]
fn selector_return_value_is_ignored() {
    let schema = schema();
    let mut table = employees(&schema);

    let id = table
        .register_column("job", db::Type::Text)
        .unwrap()
        .bind_to(|e| {
            e.get("job");
            "not a property"
        })
        .unwrap();

    assert_eq!(
        table.column(id).binding().unwrap().expect_nested().path.len(),
        1
    );
}

#[test]
fn reads_past_a_scalar_are_not_recorded() {
    let schema = schema();
    let mut table = employees(&schema);

    let id = table
        .register_column("name", db::Type::Text)
        .unwrap()
        .bind_to(|e| {
            let name = e.get("name");
            assert!(name.is_terminal());
            name.get("len")
        })
        .unwrap();

    assert_eq!(
        table.column(id).binding().unwrap().expect_nested().path.as_slice(),
        &[EMPLOYEE_NAME]
    );
}

#[test]
fn recorder_exposes_navigated_entity() {
    let schema = schema();
    let mut table = employees(&schema);

    table
        .register_column("department_name", db::Type::Text)
        .unwrap()
        .bind_to(|e| {
            assert_eq!(e.entity().unwrap().name, "Employee");
            let department = e.get("department");
            assert_eq!(department.entity().unwrap().name, "Department");
            department.get("name")
        })
        .unwrap();
}

#[test]
fn selector_reading_nothing_fails() {
    let schema = schema();
    let mut table = employees(&schema);

    let err = table
        .register_column("constant", db::Type::Integer(4))
        .unwrap()
        .bind_to(|_| 42)
        .unwrap_err();

    assert!(err.is_empty_binding_path());
    assert_eq!(err.to_string(), "no binding properties found");
    assert!(!table.get("constant").unwrap().is_bound());
}

#[test]
fn unknown_property_fails_and_leaves_column_unbound() {
    let schema = schema();
    let mut table = employees(&schema);

    let err = table
        .register_column("bonus", db::Type::Integer(8))
        .unwrap()
        .bind_to(|e| e.get("bonus"))
        .unwrap_err();

    assert!(err.is_unknown_property());
    assert_eq!(err.to_string(), "entity `Employee` has no property `bonus`");
    assert!(!table.get("bonus").unwrap().is_bound());
}

#[test]
fn unknown_property_on_nested_entity_names_that_entity() {
    let schema = schema();
    let mut table = employees(&schema);

    let err = table
        .register_column("department_budget", db::Type::Integer(8))
        .unwrap()
        .bind_to(|e| e.get("department").get("budget").get("name"))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "entity `Department` has no property `budget`"
    );
}

#[test]
fn table_without_entity_fails_regardless_of_selector() {
    let mut table = Table::new("t_audit");

    let err = table
        .register_column("name", db::Type::Text)
        .unwrap()
        .bind_to(|e| e.get("name"))
        .unwrap_err();
    assert!(err.is_unconfigured_entity());
    assert_eq!(
        err.to_string(),
        "no entity configured for table: `t_audit`"
    );

    let err = table
        .register_column("constant", db::Type::Text)
        .unwrap()
        .bind_to(|_| ())
        .unwrap_err();
    assert!(err.is_unconfigured_entity());

    assert!(table.columns().all(|column| !column.is_bound()));
}

#[test]
fn rebinding_a_column_fails_and_keeps_first_binding() {
    let schema = schema();
    let mut table = employees(&schema);

    table
        .register_column("name", db::Type::Text)
        .unwrap()
        .bind_to(|e| e.get("name"))
        .unwrap();

    let err = table
        .column_registration("name")
        .unwrap()
        .bind_to(|e| e.get("job"))
        .unwrap_err();

    assert!(err.is_already_bound());
    assert_eq!(err.to_string(), "column `t_employee.name` is already bound");
    assert_eq!(
        table.get("name").unwrap().binding(),
        Some(&Binding::Nested(NestedBinding::new([EMPLOYEE_NAME])))
    );
}

#[test]
fn failed_binding_does_not_touch_other_columns() {
    let schema = schema();
    let mut table = employees(&schema);

    table
        .register_column("name", db::Type::Text)
        .unwrap()
        .bind_to(|e| e.get("name"))
        .unwrap();

    table
        .register_column("broken", db::Type::Text)
        .unwrap()
        .bind_to(|e| e.get("nope"))
        .unwrap_err();

    assert!(table.get("name").unwrap().is_bound());
    assert!(!table.get("broken").unwrap().is_bound());
}

#[test]
fn primary_key_registration() {
    let schema = schema();
    let mut table = employees(&schema);

    table
        .register_column("id", db::Type::Integer(4))
        .unwrap()
        .primary_key()
        .bind_to(|e| e.get("id"))
        .unwrap();
    table
        .register_column("name", db::Type::Text)
        .unwrap()
        .bind_to(|e| e.get("name"))
        .unwrap();

    let pk = table.primary_key().unwrap();
    assert_eq!(pk.name, "id");
    assert_eq!(table.primary_keys().count(), 1);
}

#[test]
fn duplicate_and_missing_columns() {
    let schema = schema();
    let mut table = employees(&schema);

    table.register_column("name", db::Type::Text).unwrap();

    let err = table.register_column("name", db::Type::Text).unwrap_err();
    assert!(err.is_duplicate_column());

    let err = table.get("salary").unwrap_err();
    assert!(err.is_column_not_found());
    assert_eq!(
        err.to_string(),
        "column `salary` not found in table `t_employee`"
    );

    assert!(table
        .column_registration("salary")
        .unwrap_err()
        .is_column_not_found());
}

#[test]
fn detect_properties_without_a_table() {
    let schema = schema();

    let path = rowbind_core::binding::detect_properties(&schema.entity_ref(EMPLOYEE), |e| {
        e.get("manager").get("manager").get("name")
    })
    .unwrap();

    assert_eq!(
        path.as_slice(),
        &[EMPLOYEE_MANAGER, EMPLOYEE_MANAGER, EMPLOYEE_NAME]
    );
}

#[test]
fn sibling_reads_fail_and_leave_column_unbound() {
    let schema = schema();
    let mut table = employees(&schema);

    let err = table
        .register_column("department_name", db::Type::Text)
        .unwrap()
        .bind_to(|e| {
            e.get("department");
            e.get("name")
        })
        .unwrap_err();

    assert!(err.is_branched_path());
    assert_eq!(
        err.to_string(),
        "selector read `Employee::name` after the property path moved past `Employee`"
    );
    assert!(!table.get("department_name").unwrap().is_bound());
}

#[test]
fn reading_from_a_left_behind_nested_recorder_fails() {
    let schema = schema();
    let mut table = employees(&schema);

    let err = table
        .register_column("manager_name", db::Type::Text)
        .unwrap()
        .bind_to(|e| {
            let manager = e.get("manager");
            manager.get("department");
            manager.get("name")
        })
        .unwrap_err();

    assert!(err.is_branched_path());
}

#[test]
fn sibling_read_after_scalar_fails() {
    let schema = schema();

    let err = rowbind_core::binding::detect_properties(&schema.entity_ref(EMPLOYEE), |e| {
        e.get("name");
        e.get("job")
    })
    .unwrap_err();

    assert!(err.is_branched_path());
}

#[test]
fn nested_binding_accessors() {
    let schema = schema();
    let mut table = employees(&schema);

    let id = table
        .register_column("salary", db::Type::Integer(8))
        .unwrap()
        .bind_to(|e| e.get("salary"))
        .unwrap();

    let binding = table.column(id).binding().unwrap();
    assert!(binding.as_reference().is_none());
    assert_eq!(
        binding.as_nested().map(NestedBinding::terminal),
        Some(EMPLOYEE.property(4))
    );
}
