
use holocron_test_utils::prelude::*;

use crate::server::service::catalog::CatalogService;
