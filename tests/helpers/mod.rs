// ==========================================
// 集成测试共享辅助
// ==========================================

#![allow(dead_code)]

pub mod mock_solver;
pub mod request_builder;
