pub mod alert_controller;
