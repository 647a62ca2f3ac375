//! Tests for fold partitioning and the cross-validation runner

mod kfold_tests;
