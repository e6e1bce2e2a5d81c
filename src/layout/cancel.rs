// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::error::LayoutError;

/// Cooperative cancellation signal polled by the layout engine.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;

    fn checkpoint(&self) -> Result<(), LayoutError> {
        if self.is_cancelled() {
            return Err(LayoutError::Cancelled);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl Cancellation for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Cloneable flag; every clone observes the same cancellation.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

impl Cancellation for CancelFlag {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl<C: Cancellation + ?Sized> Cancellation for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
