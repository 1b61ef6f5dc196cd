/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod driver_profile;
pub mod payment;
pub mod profile;
pub mod rating;
pub mod ride;
