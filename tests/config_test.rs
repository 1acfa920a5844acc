// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证仿真默认值的读取与回退
// ==========================================


use rolling_sim::config::{config_keys, ConfigManager, SimulationConfigReader};
use rolling_sim::domain::types::ValidationPolicy;
use test_helpers::{create_test_db, insert_test_config, open_test_connection};

#[tokio::test]
async fn test_config_manager_creation() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    let config_manager = ConfigManager::new(&db_path);
    assert!(
        config_manager.is_ok(),
        "ConfigManager should be created successfully"
    );
}

#[tokio::test]
async fn test_defaults_without_overrides() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let manager = ConfigManager::new(&db_path).unwrap();

    let defaults = manager.load_defaults().await.unwrap();
    assert_eq!(defaults.validation_policy, ValidationPolicy::Strict);
    assert_eq!(defaults.transport_environment_temperature, 293.15);
    assert_eq!(defaults.transport_heat_transfer_coefficient, 15.0);
    assert_eq!(defaults.default_groove_type, "BoxGroove");
}

#[tokio::test]
async fn test_overrides_written_by_another_connection() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let conn = open_test_connection(&db_path).expect("Failed to open db");
    insert_test_config(&conn, config_keys::VALIDATION_POLICY, "ADVISORY").unwrap();
    insert_test_config(&conn, config_keys::TRANSPORT_HEAT_TRANSFER_COEFFICIENT, "25").unwrap();
    insert_test_config(&conn, config_keys::DEFAULT_GROOVE_TYPE, "FlatGroove").unwrap();

    let manager = ConfigManager::new(&db_path).unwrap();
    let defaults = manager.load_defaults().await.unwrap();

    assert_eq!(defaults.validation_policy, ValidationPolicy::Advisory);
    assert_eq!(defaults.transport_heat_transfer_coefficient, 25.0);
    assert_eq!(defaults.transport_environment_temperature, 293.15);
    assert_eq!(defaults.default_groove_type, "FlatGroove");
}

#[tokio::test]
async fn test_unrecognised_policy_falls_back_to_strict() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let conn = open_test_connection(&db_path).expect("Failed to open db");
    insert_test_config(&conn, config_keys::VALIDATION_POLICY, "AUTO_FIX").unwrap();

    let manager = ConfigManager::new(&db_path).unwrap();
    assert_eq!(
        manager.get_validation_policy().await.unwrap(),
        ValidationPolicy::Strict
    );
}

#[tokio::test]
async fn test_set_global_config_value_upserts() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let manager = ConfigManager::new(&db_path).unwrap();

    manager
        .set_global_config_value(config_keys::TRANSPORT_ENVIRONMENT_TEMPERATURE, "290")
        .unwrap();
    manager
        .set_global_config_value(config_keys::TRANSPORT_ENVIRONMENT_TEMPERATURE, "295.5")
        .unwrap();

    assert_eq!(
        manager
            .get_global_config_value(config_keys::TRANSPORT_ENVIRONMENT_TEMPERATURE)
            .unwrap()
            .as_deref(),
        Some("295.5")
    );
    assert_eq!(
        manager.get_transport_environment_temperature().await.unwrap(),
        295.5
    );
}
