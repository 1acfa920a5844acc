// ==========================================
// 仿真请求构造器 - 用于集成测试
// ==========================================

use rolling_sim::domain::SimulationRequest;
use serde_json::{json, Value};

/// 圆形来料（直径 m, 温度 K）
pub fn round_profile(diameter: f64, temperature: f64) -> Value {
    json!({
        "shape": "round",
        "diameter": diameter,
        "temperature": temperature,
        "material": "C45"
    })
}

/// 圆孔型二辊道次
pub fn round_groove_pass() -> Value {
    json!({
        "type": "TwoRollPass",
        "grooveType": "RoundGroove",
        "groove": {"r1": 0.01, "r2": 0.02, "depth": 0.005},
        "nominal_radius": 0.2,
        "gap": 0.01,
        "velocityDefineBy": "velocity",
        "velocityValue": 1.0
    })
}

/// 带标签的圆孔型二辊道次
pub fn labelled_round_pass(label: &str) -> Value {
    let mut pass = round_groove_pass();
    pass["label"] = json!(label);
    pass
}

/// 平辊三辊道次
pub fn three_roll_pass(orientation: &str) -> Value {
    json!({
        "type": "ThreeRollPass",
        "grooveType": "FlatGroove",
        "groove": {"r1": 0.002, "usable_width": 0.03},
        "nominal_radius": 0.15,
        "inscribed_circle_diameter": 0.04,
        "orientation": orientation,
        "velocityDefineBy": "rotational_frequency",
        "velocityValue": 5.0
    })
}

/// 输送段
pub fn transport(length: f64) -> Value {
    json!({
        "type": "Transport",
        "transportDefineBy": "length",
        "transportValue": length
    })
}

/// 水冷管段
pub fn cooling_pipe(length: f64) -> Value {
    json!({
        "type": "CoolingPipe",
        "coolingDefineBy": "length",
        "coolingValue": length,
        "inner_radius": 0.03,
        "coolant_temperature": 300.0,
        "coolant_volume_flux": 0.01
    })
}

/// 完整请求（JSON）
pub fn request_json(passes: Vec<Value>, solve_method: &str, solve_params: Value) -> Value {
    json!({
        "inProfile": round_profile(0.05, 1473.0),
        "passDesignData": passes,
        "solve_method": solve_method,
        "solve_params": solve_params
    })
}

/// 完整请求（强类型）
pub fn request(passes: Vec<Value>, solve_method: &str, solve_params: Value) -> SimulationRequest {
    serde_json::from_value(request_json(passes, solve_method, solve_params)).unwrap()
}

/// 标准求解请求
pub fn solve_request(passes: Vec<Value>) -> SimulationRequest {
    request(passes, "solve", json!({}))
}
