/// Fixed clock/data pin pairs of the two display connectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Connector {
    J1,
    J2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectorPins {
    pub clk: u8,
    pub dio: u8,
}

impl Connector {
    pub fn pins(self) -> ConnectorPins {
        match self {
            Connector::J1 => ConnectorPins { clk: 14, dio: 13 },
            Connector::J2 => ConnectorPins { clk: 16, dio: 15 },
        }
    }
}
