//! CLC/CLD/CLI/CLV and SEC/SED/SEI have no dedicated handlers: the
//! executor removes or inserts the flag carried by the decoded operation.
//! The tests here pin down that wiring.
