pub mod unit_template;
