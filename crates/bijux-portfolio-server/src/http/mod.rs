// SPDX-License-Identifier: Apache-2.0

pub(crate) mod handlers;
pub(crate) mod request_tracing;
pub(crate) mod response_contract;
pub(crate) mod static_assets;
