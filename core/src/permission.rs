/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::profile::Role;

pub type AccessList = &'static [Role];

pub const CUSTOMER_ONLY: AccessList = &[Role::Customer];
pub const DRIVER_ONLY: AccessList = &[Role::Driver];
pub const ADMIN_ONLY: AccessList = &[Role::Admin];
pub const ANY_ROLE: AccessList = &[Role::Customer, Role::Driver, Role::Admin];

pub fn has_access(allowed: AccessList, role: Role) -> bool {
    allowed.contains(&role)
}
