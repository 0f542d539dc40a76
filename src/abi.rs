use alloy::sol;

// Gnosis Safe owner listing, the security councils are Safe multisigs
sol! {
    function getOwners() external view returns (address[] memory);
}
