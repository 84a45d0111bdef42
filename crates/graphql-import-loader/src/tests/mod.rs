mod schema_builder_tests;
mod unused_fragment_pruner_tests;
mod validator_tests;
