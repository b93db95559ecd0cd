//! Contract interfaces read by the monitor
//!
//! Each interface is annotated with `#[sol(rpc)]` so alloy generates an
//! instance type that performs `eth_call`s through any provider.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IToken {
        function decimals() external view returns (uint8);
    }
}

// PalaDEX pools expose Uniswap V2 style reserves; Klayswap pools expose
// `getCurrentPool` instead.
sol! {
    #[sol(rpc)]
    interface IPairPool {
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
        function getCurrentPool() external view returns (uint256 reserve0, uint256 reserve1);
    }
}

sol! {
    #[sol(rpc)]
    interface PalaViewer {
        function getPriceInfo() external view returns (
            uint256 palaPriceInKusdt,
            uint256 palaPriceInKlay,
            uint256 palaReserveInKusdt,
            uint256 kusdtReserveInKusdt,
            uint256 palaReserveInKlay,
            uint256 klayReserveInKlay
        );
        function scanSpread(uint256 amountIn) external view returns (address outputToken, uint256 spread);
    }
}
