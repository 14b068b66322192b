// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod calendar_tests;
mod helpers;
mod occupancy_api_tests;
mod visit_api_tests;
