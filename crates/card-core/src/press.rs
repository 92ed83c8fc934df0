//! Momentary pressed state with last-activation-wins expiry.

/// Identifies one activation. Only the newest ticket may end the press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PressTicket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PressState {
    #[default]
    Idle,
    Pressed(PressTicket),
}

#[derive(Clone, Debug, Default)]
pub struct PressDebounce {
    state: PressState,
    issued: u64,
}

impl PressDebounce {
    pub fn state(&self) -> PressState {
        self.state
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        matches!(self.state, PressState::Pressed(_))
    }

    /// Enter (or stay in) the pressed state; the returned ticket must be
    /// handed back to [`PressDebounce::expire`] when the hold timer fires.
    pub fn activate(&mut self) -> PressTicket {
        self.issued = self.issued.wrapping_add(1);
        let ticket = PressTicket(self.issued);
        self.state = PressState::Pressed(ticket);
        ticket
    }

    /// Leave the pressed state if `ticket` is from the latest activation.
    /// Returns whether the state changed.
    pub fn expire(&mut self, ticket: PressTicket) -> bool {
        match self.state {
            PressState::Pressed(current) if current == ticket => {
                self.state = PressState::Idle;
                true
            }
            _ => false,
        }
    }
}
