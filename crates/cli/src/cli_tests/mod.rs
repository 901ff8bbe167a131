// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

// Split test files for CLI parsing tests, one per command group.

use super::*;
