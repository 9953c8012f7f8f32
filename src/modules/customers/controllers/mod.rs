pub mod customer_controller;
