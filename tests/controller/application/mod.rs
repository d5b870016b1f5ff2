//! Tests for application submission, review views, the workflow actions and the staff queue.

mod create;
mod interact;
mod mine;
mod queue;
mod view;

use super::*;
